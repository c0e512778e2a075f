use std::collections::BTreeMap;

use contracts::domain::product::aggregate::{Product, ProductRecord};

/// Нарушения ограничений: wire-имя поля -> сообщение.
/// Повторное нарушение по тому же полю перезаписывает предыдущее.
pub type Violations = BTreeMap<String, String>;

const NOT_BLANK: &str = "must not be blank";
const NOT_NULL: &str = "must not be null";
const MIN_ZERO: &str = "must be greater than or equal to 0";

/// Проверка входящего представления. Вызывается до сервиса: при нарушении
/// бизнес-логика не выполняется.
pub fn validate(record: &ProductRecord) -> Result<(), Violations> {
    collect(
        record.name.as_deref(),
        record.price,
        record.short_desc.as_deref(),
    )
}

/// Та же проверка на границе хранилища.
pub fn validate_entity(product: &Product) -> Result<(), Violations> {
    collect(
        product.name.as_deref(),
        product.price,
        product.short_desc.as_deref(),
    )
}

fn collect(
    name: Option<&str>,
    price: Option<f64>,
    short_desc: Option<&str>,
) -> Result<(), Violations> {
    let mut violations = Violations::new();

    if name.map_or(true, |value| value.trim().is_empty()) {
        violations.insert("name".into(), NOT_BLANK.into());
    }
    match price {
        None => {
            violations.insert("price".into(), NOT_NULL.into());
        }
        Some(value) if value < 0.0 => {
            violations.insert("price".into(), MIN_ZERO.into());
        }
        Some(_) => {}
    }
    if short_desc.map_or(true, |value| value.trim().is_empty()) {
        violations.insert("shortDesc".into(), NOT_BLANK.into());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
