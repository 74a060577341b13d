use candidates::load_from_file;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/candidates.json"));

    println!("Loading candidate snapshot {}...\n", path.display());

    let start = Instant::now();
    let candidates = load_from_file(&path)?;
    let elapsed = start.elapsed();

    let countries: HashSet<&str> = candidates.iter().filter_map(|c| c.country.as_deref()).collect();
    let skills: HashSet<&str> = candidates.iter().flat_map(|c| c.skill_tokens()).collect();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Candidates: {}", candidates.len());
    println!("Distinct countries: {}", countries.len());
    println!("Distinct skills: {}", skills.len());
    Ok(())
}
