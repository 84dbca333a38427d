use shopping_list::format_shopping_list;
use shopping_list::list::ShoppingList;
use shopping_list::logger::init_logger;

/// Items shown by the demo
const DEMO_ITEMS: [&str; 3] = ["milk", "sugar", "bread"];

fn demo_list() -> ShoppingList {
    DEMO_ITEMS.into_iter().collect()
}

fn main() -> anyhow::Result<()> {
    init_logger()?;

    let list = demo_list();
    tracing::info!(items = list.len(), "Printing shopping list");

    println!("{}", format_shopping_list(&list));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        assert_eq!(
            format_shopping_list(&demo_list()),
            "Mi lista de la compra es: milk sugar bread"
        );
    }
}
