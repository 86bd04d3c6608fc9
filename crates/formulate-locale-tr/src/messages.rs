use alloc::format;
use alloc::string::String;

use formulate_locale_core::{SizeFraming, ValidationContext, is_empty, sentence};

pub fn accepted(ctx: &ValidationContext) -> String {
    format!("Lütfen kabul ediniz {}.", ctx.name)
}

pub fn after(ctx: &ValidationContext) -> String {
    let name = sentence(&ctx.name);
    if ctx.has_args() {
        return format!("{name} tarihi {} tarihinden sonra olmalı.", ctx.arg(0));
    }
    format!("{name} ileri bir tarih olmalı.")
}

pub fn alpha(ctx: &ValidationContext) -> String {
    format!("{} sadece alfabetik karakterler içerebilir.", sentence(&ctx.name))
}

pub fn alphanumeric(ctx: &ValidationContext) -> String {
    format!("{} sadece harf ve rakamdan oluşabilir. ", sentence(&ctx.name))
}

pub fn before(ctx: &ValidationContext) -> String {
    let name = sentence(&ctx.name);
    if ctx.has_args() {
        return format!("{name} tarihi {} tarihinden önce olmalı.", ctx.arg(0));
    }
    format!("{name} önceki bir tarih olmalı.")
}

pub fn between(ctx: &ValidationContext) -> String {
    let name = sentence(&ctx.name);
    let (low, high) = (ctx.arg(0), ctx.arg(1));
    match SizeFraming::select(&ctx.value, ctx.flag(2)) {
        SizeFraming::Value => format!("{name} must be between {low} and {high}."),
        SizeFraming::Length => {
            format!("{name} uzunluğu {low} ve {high} arasında karakter içerebilir.")
        }
    }
}

pub fn confirm(ctx: &ValidationContext) -> String {
    format!("{} eşleşmiyor.", sentence(&ctx.name))
}

pub fn date(ctx: &ValidationContext) -> String {
    let name = sentence(&ctx.name);
    if ctx.has_args() {
        return format!(
            "{name} tarihi geçerli bir tarih değil , lütfen bu formatı kullanınız. {}",
            ctx.arg(0)
        );
    }
    format!("{name} tarihi geçerli bir tarih değil.")
}

pub fn default(_ctx: &ValidationContext) -> String {
    String::from("Geçerli bir alan değil.")
}

pub fn email(ctx: &ValidationContext) -> String {
    if is_empty(&ctx.value) {
        return String::from("Lütfen geçerli bir email adresi giriniz.");
    }
    format!("“{}” is not a valid email address.", ctx.value)
}

pub fn ends_with(ctx: &ValidationContext) -> String {
    if is_empty(&ctx.value) {
        return String::from("Bu alan geçerli bir değerle bitmiyor.");
    }
    format!("“{}” geçerli bir değerle bitmiyor.", ctx.value)
}

pub fn in_values(ctx: &ValidationContext) -> String {
    match ctx.value.non_empty_str() {
        Some(value) => format!(
            "“{}” kabul edilebilir bir {} değil.",
            sentence(value),
            ctx.name
        ),
        None => format!("Bu kabul edilebilir bir {} değil.", ctx.name),
    }
}

pub fn matches(ctx: &ValidationContext) -> String {
    format!("{} kabul edilebilir bir değer değil.", sentence(&ctx.name))
}

pub fn max(ctx: &ValidationContext) -> String {
    let bound = ctx.arg(0);
    if ctx.value.is_list() {
        return format!("Bu {bound} kadar {} seçebilirsiniz.", ctx.name);
    }
    let name = sentence(&ctx.name);
    match SizeFraming::select(&ctx.value, ctx.flag(1)) {
        SizeFraming::Value => format!("{name}, {bound} değerinden küçük ya da eşit olmalı."),
        SizeFraming::Length => {
            format!("{name} karakter sayısı {bound} değerinden küçük ya da eşit olmalı")
        }
    }
}

pub fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .flag(0)
        .unwrap_or("Hiçbir dosya biçimine izin verilmiyor.");
    format!("{} must be of the the type: {types}", sentence(&ctx.name))
}

pub fn min(ctx: &ValidationContext) -> String {
    let bound = ctx.arg(0);
    if ctx.value.is_list() {
        return format!("En az bu kadar {bound} {}.", ctx.name);
    }
    let name = sentence(&ctx.name);
    match SizeFraming::select(&ctx.value, ctx.flag(1)) {
        SizeFraming::Value => format!("{name} en az bu kadar {bound}."),
        SizeFraming::Length => format!("{name} karakter sayısı {bound} en az bu kadar olmalı."),
    }
}

pub fn not(ctx: &ValidationContext) -> String {
    if is_empty(&ctx.value) {
        return format!("Bu kabul edilebilir bir {} değil.", ctx.name);
    }
    format!("“{}” kabul edilebilir bir {} değil.", ctx.value, ctx.name)
}

pub fn number(ctx: &ValidationContext) -> String {
    format!("{} sayı olmalı.", sentence(&ctx.name))
}

pub fn required(ctx: &ValidationContext) -> String {
    format!("{} alan zorunludur.", sentence(&ctx.name))
}

pub fn starts_with(ctx: &ValidationContext) -> String {
    if is_empty(&ctx.value) {
        return String::from("Bu alan geçerli bir değerle başlamıyor.");
    }
    format!("“{}” alan geçerli bir değerle başlamıyor.", ctx.value)
}

pub fn url(_ctx: &ValidationContext) -> String {
    String::from("Lütfen geçerli bir url adresi kullanınız.")
}
