pub mod test_engine;
