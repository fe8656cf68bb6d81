use mecab_rs::MeCab;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mecab = MeCab::init()?;

    let text = "Rustはとても楽しいです。";

    let surfaces = mecab.wakati(text)?;
    println!("{}", surfaces.join(" | "));

    let reading = mecab.yomi("日本語")?;
    println!("日本語 -> {reading}");

    Ok(())
}
