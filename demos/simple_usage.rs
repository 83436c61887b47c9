/// kwindex demo
///
/// Builds a keyword index over a few documents and runs two-keyword queries.
/// Run with RUST_LOG=debug to see the build progress.

use kwindex::core::config::Config;
use kwindex::core::engine::SearchEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Creating engine...");
    let mut engine = SearchEngine::new(Config::default())?;

    engine.build_index(
        "the in has a of and to is",
        [
            ("doc1.txt", "The rain in Spain stays mainly in the plain."),
            ("doc2.txt", "Spain has mostly sunny weather."),
            ("doc3.txt", "Rain, rain, go away! Come again another day."),
            ("doc4.txt", "A plain of Spain is a plain of rain?"),
        ],
    )?;

    let stats = engine.stats();
    println!("  Documents:   {}", stats.documents);
    println!("  Keywords:    {}", stats.keywords);
    println!("  Occurrences: {}", stats.occurrences);
    println!();

    if let Some(rain) = engine.keyword("rain") {
        let occurrences: Vec<String> = rain.iter().map(|occ| occ.to_string()).collect();
        println!("rain -> {}", occurrences.join(" "));
    }
    println!();

    for (kw1, kw2) in [("rain", "spain"), ("plain", "sunny"), ("snow", "hail")] {
        match engine.search(kw1, kw2) {
            Some(docs) => println!("'{}' OR '{}': {}", kw1, kw2, docs.join(", ")),
            None => println!("'{}' OR '{}': no match", kw1, kw2),
        }
    }

    Ok(())
}
