pub mod birthday;
pub mod brute_force;
pub mod helper;

use helper::*;
use super::attack::Attack;
use super::error::AttackError;
