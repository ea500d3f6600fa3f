mod client;
mod live;
