mod error;
mod feed_query;
