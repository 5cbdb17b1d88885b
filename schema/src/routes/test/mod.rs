use std::collections::HashSet;

use super::{all, find, resolve, tags};
use crate::registry;
use crate::route::{Method, PathParamKind};

mod catalogue;
mod resolve;
