pub mod api_utils;
pub mod click_delegation;
pub mod config;
pub mod dom;
pub mod html;
pub mod number_format;

#[cfg(test)]
pub mod testing;
