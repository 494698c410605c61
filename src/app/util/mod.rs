pub mod html;
pub mod reqwest;
pub mod time;

#[cfg(test)]
pub mod test_server;
