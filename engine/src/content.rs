use std::collections::HashMap;

pub fn builtin_maps() -> HashMap<&'static str, &'static str> {
    HashMap::from([("lair", include_str!("../content/maps/lair.txt"))])
}
