pub mod background;
pub mod state;
pub mod theme;
pub mod views;

#[cfg(test)]
mod tests;
