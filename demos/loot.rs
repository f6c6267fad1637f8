use luckdraw::{MappedSelector, Quantity, chance_percent};
use std::collections::HashMap;

struct Drop {
    weight: f64,
    gold: Quantity,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let table = HashMap::from([
        ("rat tail", Drop { weight: 60.0, gold: Quantity::Fixed(1.0) }),
        ("silver ring", Drop { weight: 25.0, gold: (20.0, 40.0).into() }),
        ("dragon scale", Drop { weight: 4.0, gold: (300.0, 900.0).into() }),
        ("broken sword", Drop { weight: 0.0, gold: Quantity::Fixed(0.0) }),
    ]);

    for kill in 1..=10 {
        if !chance_percent(70.0) {
            println!("kill {kill:>2}: nothing");
            continue;
        }
        let mut sel = MappedSelector::build(
            &table,
            |_, d| d.weight,
            |name, d| format!("{name} worth {:.0} gold", d.gold.resolve()),
            false,
        )?;
        println!("kill {kill:>2}: {}", sel.draw()?);
    }

    Ok(())
}
