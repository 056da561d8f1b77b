mod credentials;
mod thumbnail;
