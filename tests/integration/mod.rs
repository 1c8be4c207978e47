/// Integration test harness (wired via [[test]] in Cargo.toml)

mod basic_integration;
