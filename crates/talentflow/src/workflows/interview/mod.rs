pub mod scorecards;
