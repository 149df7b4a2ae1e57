pub mod blocks_world;
pub mod sliding_puzzle;
