use anyhow::{Context, Result};

const HEADER: [&str; 7] = [
    "Primary Category",
    "Secondary Category",
    "Food Item",
    "Serving Size",
    "Serving Size Value",
    "Oxalate Category",
    "Oxalate Value",
];

/// (primary, secondary, food, serving size, serving unit, oxalate mg per serving)
const FOODS: &[(&str, &str, &str, &str, &str, f64)] = &[
    ("Vegetables", "Leafy", "Spinach, raw", "1", "cup", 656.0),
    ("Vegetables", "Leafy", "Spinach, cooked", "1/2", "cup", 755.0),
    ("Vegetables", "Leafy", "Kale", "1", "cup", 2.0),
    ("Vegetables", "Leafy", "Swiss chard", "1/2", "cup", 48.0),
    ("Vegetables", "Leafy", "Romaine lettuce", "1", "cup", 0.0),
    ("Vegetables", "Root", "Beets", "1/2", "cup", 76.0),
    ("Vegetables", "Root", "Carrots", "1", "medium", 10.0),
    ("Vegetables", "Root", "Potato, baked with skin", "1", "medium", 97.0),
    ("Vegetables", "Root", "Radishes", "1/2", "cup", 0.0),
    ("Vegetables", "Cruciferous", "Broccoli", "1", "cup", 2.0),
    ("Vegetables", "Cruciferous", "Cauliflower", "1/2", "cup", 1.0),
    ("Fruit", "Berries", "Raspberries", "1", "cup", 48.0),
    ("Fruit", "Berries", "Blueberries", "1", "cup", 4.0),
    ("Fruit", "Berries", "Blackberries", "1", "cup", 4.0),
    ("Fruit", "Citrus", "Orange", "1", "medium", 29.0),
    ("Fruit", "Citrus", "Lemon juice", "1", "tbsp", 0.0),
    ("Fruit", "Tropical", "Pineapple, canned", "1", "cup", 24.0),
    ("Fruit", "Tropical", "Banana", "1", "medium", 3.0),
    ("Nuts and Seeds", "Nuts", "Almonds", "1", "oz (22 nuts)", 122.0),
    ("Nuts and Seeds", "Nuts", "Cashews", "1", "oz", 49.0),
    ("Nuts and Seeds", "Nuts", "Walnuts", "1", "cup", 62.0),
    ("Nuts and Seeds", "Seeds", "Sesame seeds", "1", "tbsp", 21.0),
    ("Nuts and Seeds", "Seeds", "Pumpkin seeds", "1", "oz", 1.0),
    ("Grains", "Bread", "Whole wheat bread", "1", "slice", 6.0),
    ("Grains", "Cereal", "Bran flakes", "1", "cup", 26.0),
    ("Grains", "Rice", "White rice, cooked", "1", "cup", 4.0),
    ("Grains", "Rice", "Brown rice, cooked", "1", "cup", 24.0),
    ("Beverages", "Tea", "Black tea, brewed", "1", "cup", 14.0),
    ("Beverages", "Coffee", "Coffee, brewed", "1", "cup", 2.0),
    ("Beverages", "Dairy", "Milk", "1", "cup", 0.0),
];

/// Category label for an oxalate amount per serving.
fn oxalate_category(mg: f64) -> &'static str {
    match mg {
        x if x <= 1.0 => "Little or None",
        x if x < 5.0 => "Very Low",
        x if x < 10.0 => "Low",
        x if x < 25.0 => "Moderate",
        x if x < 100.0 => "High",
        _ => "Very High",
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "oxalates.csv".to_string());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADER).context("writing header")?;

    for &(primary, secondary, food, size, unit, mg) in FOODS {
        let value = format!("{mg} mg");
        writer
            .write_record([primary, secondary, food, size, unit, oxalate_category(mg), value.as_str()])
            .with_context(|| format!("writing row for {food}"))?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {} foods to {output_path}", FOODS.len());
    Ok(())
}
