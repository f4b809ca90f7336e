use order_generator::{
    generator::{DEFAULT_PRICE, DEFAULT_QUANTITY, OrderGenerator, generate_orders},
    orders::OrderRecord,
    writer::LINE_ENDING,
    writer::{read_orders, write_orders},
};
use tempfile::tempdir;

/// `^[BS],\d+,\d+,\d+$`
fn matches_line_pattern(line: &str) -> bool {
    let fields: Vec<&str> = line.split(',').collect();
    fields.len() == 4
        && (fields[0] == "B" || fields[0] == "S")
        && fields[1..]
            .iter()
            .all(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
}

#[test]
fn test_zero_orders_creates_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.txt");

    write_orders(&path, OrderGenerator::new(0)).unwrap();

    assert!(path.exists());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_three_orders_have_ids_one_to_three() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.txt");

    write_orders(&path, OrderGenerator::new(3)).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        assert!(matches_line_pattern(line), "bad line: {}", line);
        assert_eq!(line.split(',').nth(1).unwrap(), (i + 1).to_string());
    }
    assert!(text.ends_with(LINE_ENDING));
    assert_eq!(text.matches(LINE_ENDING).count(), 3);
}

#[test]
fn test_line_count_matches_order_count() {
    let dir = tempdir().unwrap();
    for n in [1u64, 2, 17, 1_000] {
        let path = dir.path().join(format!("orders_{}.txt", n));
        let written = write_orders(&path, OrderGenerator::new(n)).unwrap();
        assert_eq!(written, n);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count() as u64, n);
    }
}

#[test]
fn test_every_written_order_is_in_bounds_and_sequential() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.txt");

    write_orders(&path, generate_orders(5_000)).unwrap();
    let orders: Vec<OrderRecord> = read_orders(&path).unwrap();

    assert_eq!(orders.len(), 5_000);
    for (i, o) in orders.iter().enumerate() {
        assert_eq!(o.id, i as u64 + 1);
        assert!(DEFAULT_PRICE.contains(&o.price));
        assert!(DEFAULT_QUANTITY.contains(&o.quantity));
    }

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.lines().all(matches_line_pattern));
}

#[test]
fn test_rerun_overwrites_previous_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.txt");

    write_orders(&path, OrderGenerator::new(100)).unwrap();
    write_orders(&path, OrderGenerator::new(2)).unwrap();

    let orders = read_orders(&path).unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].id, 2);
}
