pub mod currency;
pub mod money;

#[cfg(test)]
mod money_props;
