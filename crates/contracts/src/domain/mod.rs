pub mod a001_price_item;
