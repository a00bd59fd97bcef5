pub mod feed_report;
