pub mod p001_public_prices;
