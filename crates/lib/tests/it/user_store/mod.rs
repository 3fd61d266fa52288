//! UserStore integration tests

mod lifecycle_tests;
mod persistence_tests;
mod seeding_tests;
