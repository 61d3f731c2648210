pub mod reply;

#[cfg(test)]
mod tests;
