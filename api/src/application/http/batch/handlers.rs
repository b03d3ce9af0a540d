pub mod classify_batch;
