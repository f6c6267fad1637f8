use luckdraw::WeightedEnum;
use std::collections::HashMap;

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, WeightedEnum)]
enum Rarity {
    #[weight(1/1000)]
    Mythic,
    #[weight(1/100)]
    Legendary,
    #[weight(20/100)]
    Uncommon,
    #[weight(50/100)]
    Common,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = rand::rng();
    let mut hist: HashMap<Rarity, u64> = HashMap::default();

    // The pivot is fixed per selector, so build one per roll.
    for _ in 0..200_000 {
        let mut sel = Rarity::selector_with(false, &mut rng)?;
        *hist.entry(sel.draw()?).or_default() += 1;
    }

    let mut values: Vec<(Rarity, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));

    for (rarity, count) in values {
        println!("{count: >6} {rarity:?}");
    }

    Ok(())
}
