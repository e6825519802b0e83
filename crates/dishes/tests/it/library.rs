//! Tests against the public library API.

use dishes::{ERR_EMPTY_INGREDIENT, ERR_NULL_DISH, InvertError, Strategy, invert, invert_with};

#[test]
fn invert_borrowed_rows() {
    let dishes = [
        vec![Some("Salad"), Some("Tomato"), Some("Cucumber"), Some("Salad"), Some("Sauce")],
        vec![Some("Sandwich"), Some("Bread"), Some("Cheese")],
    ];

    let table = invert(Some(&dishes[..])).unwrap();

    assert_eq!(
        table,
        vec![
            vec!["Bread", "Sandwich"],
            vec!["Cheese", "Sandwich"],
            vec!["Cucumber", "Salad"],
            vec!["Salad", "Salad"],
            vec!["Sauce", "Salad"],
            vec!["Tomato", "Salad"],
        ]
    );
}

#[test]
fn sentinels_are_public() {
    let dishes = [vec![None, Some(""), Some("Beans")]];

    let table = invert_with(Some(&dishes[..]), Strategy::Hashed).unwrap();

    assert_eq!(
        table,
        vec![
            vec!["Beans".to_owned(), ERR_NULL_DISH.to_owned()],
            vec![ERR_EMPTY_INGREDIENT.to_owned(), ERR_NULL_DISH.to_owned()],
        ]
    );
}

#[test]
fn absent_table() {
    let dishes: Option<&[Vec<Option<String>>]> = None;
    let err = invert(dishes).unwrap_err();

    assert_eq!(err, InvertError::MissingInput);
    assert_eq!(err.to_string(), "there are no dishes");
}
