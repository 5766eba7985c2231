mod integration;
mod logging;
