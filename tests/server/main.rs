mod client;
mod screen_api;
