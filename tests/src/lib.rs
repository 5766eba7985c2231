#[cfg(test)]
mod generation;
