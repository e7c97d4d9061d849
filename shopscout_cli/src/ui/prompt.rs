use std::io::Write;

use shopscout::{CandidateSet, Listing, Selection};
use tokio::task;

/// Interactive terminal actor: numbered candidates per store, one pick or
/// skip per store, read from stdin. EOF reads as skip.
pub async fn resolve(term: &str, candidates: &CandidateSet) -> Selection {
    let mut selection = Selection::new();

    for (store, listings) in candidates.groups() {
        println!();
        println!(
            "== {} - {} match(es) for \"{}\" ==",
            store,
            listings.len(),
            term
        );
        for (index, listing) in listings.iter().enumerate() {
            println!("  {}. {}", index + 1, describe(listing));
        }

        match ask(store, listings.len()).await {
            Some(index) => selection.choose(store, listings[index].clone()),
            None => selection.skip(store),
        }
    }

    selection
}

fn describe(listing: &Listing) -> String {
    let mut line = format!("{} - {}", listing.name, listing.price_label());
    if let Some(rating) = &listing.rating {
        line.push_str(&format!(" [{}]", rating));
    }
    if let Some(description) = &listing.description {
        line.push_str(&format!("\n     {}", description));
    }
    line
}

async fn ask(store: &str, count: usize) -> Option<usize> {
    loop {
        print!("pick 1-{} for {}, or press enter to skip: ", count, store);
        let _ = std::io::stdout().flush();

        let line = match task::spawn_blocking(read_line).await {
            Ok(Ok(line)) => line,
            _ => return None,
        };

        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("s")
            || trimmed.eq_ignore_ascii_case("skip")
        {
            return None;
        }

        match trimmed.parse::<usize>() {
            Ok(pick) if (1..=count).contains(&pick) => return Some(pick - 1),
            _ => println!("enter a number between 1 and {}, or leave empty to skip", count),
        }
    }
}

fn read_line() -> std::io::Result<String> {
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}
