//! Shared values through `@name` and `#name`.
//!
//! Run with: cargo run --example references

use ikon::{from_str, to_string, to_string_with_options, ComposeOptions};
use std::error::Error;

const INPUT: &str = "{ User name \"Alice\" } @alice
[
\t{ Order id =1 customer #alice }
\t{ Order id =2 customer #alice }
]";

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = from_str(INPUT)?;
    let alice = doc.named("alice").ok_or("alice is not declared")?;

    // Both orders hold the very same customer value
    let orders = doc[doc.roots()[1]].as_array().ok_or("expected an array")?;
    for &order in orders {
        let customer = doc[order].as_composite().and_then(|o| o.get("customer"));
        assert_eq!(customer, Some(alice));
    }
    println!("✓ Both orders share {}", alice);

    // A change made through the name is seen from every order
    let email = doc.text("alice@example.com");
    doc.set_attribute(alice, "email", email)?;

    let ikon = to_string(&doc)?;
    println!("IKON output:\n{}", ikon);

    let options = ComposeOptions::new().with_indent("  ");
    println!("With two-space indent:\n{}", to_string_with_options(&doc, &options)?);

    let again = from_str(&ikon)?;
    assert!(doc.same_shape(doc.roots()[1], &again, again.roots()[1]));
    println!("✓ Round-trip successful");

    println!("JSON export:\n{}", serde_json::to_string_pretty(&doc)?);

    Ok(())
}
