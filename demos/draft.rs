//! Draft a squad without repeats using a trimming selector.

use luckdraw::{KeyedSelector, SelectError, between_ints};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let roster = BTreeMap::from([
        ("Ada", 9u32),
        ("Brin", 7),
        ("Cato", 5),
        ("Dara", 8),
        ("Eko", 0),
        ("Fen", 3),
    ]);

    let picks = between_ints(2, 4) as usize;
    let mut sel = KeyedSelector::build(&roster, |_, skill| f64::from(*skill), true)?;

    for round in 1..=picks {
        match sel.draw() {
            Ok(name) => println!("round {round}: {name} (skill {})", roster[name]),
            Err(SelectError::EmptySelector) => break,
            Err(e) => return Err(e.into()),
        }
    }
    println!("left undrafted: {:?}", sel.keys().collect::<Vec<_>>());

    Ok(())
}
