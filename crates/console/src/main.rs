//! Interactive text-menu front-end for the sweet shop.
//!
//! Drives an in-process [`SweetShop`] from stdin, one operation per menu
//! choice. All domain failures surface as printed messages and the loop
//! continues; only IO errors abort the session.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use sweetshop_inventory::{SearchFilter, Sweet, SweetId, SweetShop};

const MENU: &str = "\n--- Sweet Shop Menu ---\n\
1. Add Sweet\n\
2. View Sweets\n\
3. Delete Sweet\n\
4. Search Sweets\n\
5. Purchase Sweet\n\
6. Restock Sweet\n\
0. Exit";

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let mut shop = SweetShop::new();
    run(&mut shop, &mut input, &mut out)
}

/// Menu loop. Generic over reader/writer so scripted sessions can be tested.
fn run(shop: &mut SweetShop, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_sweet(shop, input, out)?,
            "2" => view_sweets(shop, out)?,
            "3" => delete_sweet(shop, input, out)?,
            "4" => search_sweets(shop, input, out)?,
            "5" => purchase_sweet(shop, input, out)?,
            "6" => restock_sweet(shop, input, out)?,
            "0" => {
                writeln!(out, "Exiting Sweet Shop. Bye!")?;
                break;
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
    Ok(())
}

/// Print `label`, read one line, and return it trimmed. `None` on EOF.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_sweet(shop: &mut SweetShop, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let Some(id) = prompt(input, out, "Enter Sweet ID: ")? else {
        return Ok(());
    };
    let Ok(id) = id.parse::<u64>() else {
        writeln!(out, "Error: '{id}' is not a valid id")?;
        return Ok(());
    };
    let Some(name) = prompt(input, out, "Enter Sweet Name: ")? else {
        return Ok(());
    };
    let Some(category) = prompt(input, out, "Enter Category (e.g., Chocolate, Nut-Based): ")?
    else {
        return Ok(());
    };
    let Some(price) = prompt(input, out, "Enter Price: ")? else {
        return Ok(());
    };
    let Ok(price) = price.parse::<f64>() else {
        writeln!(out, "Error: '{price}' is not a valid price")?;
        return Ok(());
    };
    let Some(quantity) = prompt(input, out, "Enter Quantity: ")? else {
        return Ok(());
    };
    let Ok(quantity) = quantity.parse::<i64>() else {
        writeln!(out, "Error: '{quantity}' is not a valid quantity")?;
        return Ok(());
    };

    match Sweet::new(SweetId(id), name, category, price, quantity).and_then(|s| shop.add(s)) {
        Ok(()) => writeln!(out, "Sweet added successfully!")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

fn view_sweets(shop: &SweetShop, out: &mut impl Write) -> Result<()> {
    if shop.is_empty() {
        writeln!(out, "No sweets available.")?;
    }
    for sweet in shop.sweets() {
        writeln!(out, "- {}", format_sweet(sweet))?;
    }
    Ok(())
}

fn delete_sweet(shop: &mut SweetShop, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let Some(id) = prompt_id(input, out, "Enter Sweet ID to delete: ")? else {
        return Ok(());
    };
    match shop.delete(id) {
        Ok(_) => writeln!(out, "Sweet deleted.")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

fn search_sweets(shop: &SweetShop, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nSearch Options:")?;
    let Some(name) = prompt(input, out, "Search by Name (leave blank if not): ")? else {
        return Ok(());
    };
    let Some(category) = prompt(input, out, "Search by Category (leave blank if not): ")? else {
        return Ok(());
    };
    let Some(price_min) = prompt(input, out, "Minimum Price (leave blank if not): ")? else {
        return Ok(());
    };
    let Some(price_max) = prompt(input, out, "Maximum Price (leave blank if not): ")? else {
        return Ok(());
    };

    let filter = match parse_filter(&name, &category, &price_min, &price_max) {
        Ok(filter) => filter,
        Err(msg) => {
            writeln!(out, "Error: {msg}")?;
            return Ok(());
        }
    };

    let results = shop.search(&filter);
    if results.is_empty() {
        writeln!(out, "No sweets matched your search.")?;
    }
    for sweet in &results {
        writeln!(out, "- {}", format_sweet(sweet))?;
    }
    Ok(())
}

fn purchase_sweet(
    shop: &mut SweetShop,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let Some(id) = prompt_id(input, out, "Enter Sweet ID to purchase: ")? else {
        return Ok(());
    };
    let Some(qty) = prompt_quantity(input, out, "Enter quantity to purchase: ")? else {
        return Ok(());
    };
    match shop.purchase(id, qty) {
        Ok(remaining) => writeln!(out, "Sweet purchased successfully! {remaining} left.")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

fn restock_sweet(
    shop: &mut SweetShop,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let Some(id) = prompt_id(input, out, "Enter Sweet ID to restock: ")? else {
        return Ok(());
    };
    let Some(qty) = prompt_quantity(input, out, "Enter quantity to add: ")? else {
        return Ok(());
    };
    match shop.restock(id, qty) {
        Ok(total) => writeln!(out, "Restocked successfully! {total} in stock.")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

/// Prompt for a sweet id; prints an error and yields `None` on bad input so
/// the caller returns to the menu.
fn prompt_id(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> Result<Option<SweetId>> {
    let Some(raw) = prompt(input, out, label)? else {
        return Ok(None);
    };
    match raw.parse::<u64>() {
        Ok(id) => Ok(Some(SweetId(id))),
        Err(_) => {
            writeln!(out, "Error: '{raw}' is not a valid id")?;
            Ok(None)
        }
    }
}

fn prompt_quantity(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> Result<Option<i64>> {
    let Some(raw) = prompt(input, out, label)? else {
        return Ok(None);
    };
    match raw.parse::<i64>() {
        Ok(qty) => Ok(Some(qty)),
        Err(_) => {
            writeln!(out, "Error: '{raw}' is not a valid quantity")?;
            Ok(None)
        }
    }
}

/// One line per sweet, in the listing format the shop has always used.
fn format_sweet(sweet: &Sweet) -> String {
    format!(
        "{} ({}) - ₹{} [{} left]",
        sweet.name(),
        sweet.category(),
        sweet.price(),
        sweet.quantity()
    )
}

/// Build a search filter from raw prompt answers; blank answers mean "no
/// constraint".
fn parse_filter(
    name: &str,
    category: &str,
    price_min: &str,
    price_max: &str,
) -> Result<SearchFilter, String> {
    Ok(SearchFilter {
        name: non_blank(name),
        category: non_blank(category),
        price_min: parse_optional_price(price_min)?,
        price_max: parse_optional_price(price_max)?,
    })
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn parse_optional_price(s: &str) -> Result<Option<f64>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse()
        .map(Some)
        .map_err(|_| format!("'{s}' is not a number"))
}
