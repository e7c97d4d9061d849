mod plan;
mod prompt;

pub use plan::{PlanChoice, SelectionPlan};

use futures::StreamExt;
use shopscout::{CandidateSet, EventStream, Receipt, Selection, UiEvent};

/// How prompts get answered: a human at the terminal, or a prewritten plan.
pub enum SelectionActor {
    Prompt,
    Scripted(SelectionPlan),
}

impl SelectionActor {
    async fn decide(&self, term: &str, candidates: &CandidateSet) -> Selection {
        match self {
            SelectionActor::Prompt => prompt::resolve(term, candidates).await,
            SelectionActor::Scripted(plan) => plan.resolve(term, candidates),
        }
    }
}

/// Drains the pipeline's event stream until the run finalizes.
pub async fn drive(mut events: EventStream, actor: SelectionActor) {
    while let Some(event) = events.next().await {
        match event {
            UiEvent::Log(line) => println!("{}", line),
            UiEvent::PromptSelection {
                term,
                candidates,
                resolver,
            } => {
                let selection = actor.decide(&term, &candidates).await;
                if resolver.resolve(selection).is_err() {
                    // the run is gone; nothing left to answer
                    break;
                }
            }
            UiEvent::Finalize(receipt) => print_receipt(&receipt),
        }
    }
}

fn print_receipt(receipt: &Receipt) {
    println!();
    println!("----------------- receipt -----------------");
    for line in &receipt.lines {
        println!(
            "{:<16} {:>2} item(s)  ${:>8.2}",
            line.store, line.items, line.subtotal
        );
    }
    match &receipt.cheapest {
        Some(store) => println!("cheapest store: {}", store),
        None => println!("no carts were filled; nothing to compare"),
    }
    println!(
        "generated {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
}
