//! Ручная конвертация wire <-> entity: поле в поле, без побочных эффектов.
//! Отсутствующие значения (`None`) переносятся как есть в обе стороны,
//! у списков сохраняются порядок и длина.

use contracts::domain::product::aggregate::{Product, ProductRecord};

pub fn record_to_product(record: ProductRecord) -> Product {
    Product {
        id: record.id,
        name: record.name,
        price: record.price,
        short_desc: record.short_desc,
        long_desc: record.long_desc,
        thumbnail: record.thumbnail,
        image: record.image,
        created_on: record.created_on,
        updated_on: record.updated_on,
        deleted_on: record.deleted_on,
        active: record.active,
    }
}

pub fn product_to_record(product: Product) -> ProductRecord {
    ProductRecord {
        id: product.id,
        name: product.name,
        price: product.price,
        short_desc: product.short_desc,
        long_desc: product.long_desc,
        thumbnail: product.thumbnail,
        image: product.image,
        created_on: product.created_on,
        updated_on: product.updated_on,
        deleted_on: product.deleted_on,
        active: product.active,
    }
}

pub fn products_to_records(products: Vec<Product>) -> Vec<ProductRecord> {
    products.into_iter().map(product_to_record).collect()
}
