pub mod feed_interface;
