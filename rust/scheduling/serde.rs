use crate::json::JSON;
use crate::scheduling::Cal;

impl JSON for Cal {}
