use mecab_rs::MeCab;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // init() uses $MECAB_PATH if set, otherwise "mecab" on PATH.
    let mecab = MeCab::init()?;

    let text = "Rustはとても楽しいです。";

    for word in mecab.parse(text)? {
        println!(
            "{}\t{} ({}, base={}, reading={})",
            word.surface,
            word.feature,
            word.feature_details[0],
            word.original_form,
            word.reading.as_deref().unwrap_or("-")
        );
    }

    for node in mecab.dump(text)? {
        println!(
            "node #{}: {} [{}..{}] best={} prob={} cost={:?}",
            node.node_id,
            node.word.surface,
            node.character_start_byte,
            node.character_end_byte,
            node.is_best,
            node.prob,
            node.cost
        );
    }

    Ok(())
}
