//! Parser module — Lua source to [`Module`].

pub mod annotation;
pub mod block;
pub mod signature;

use crate::model::Module;
use block::Machine;

/// Parse an annotated Lua source file into an (unsorted) Module.
pub fn parse(name: &str, input: &str, lookahead: usize) -> Module {
    let mut machine = Machine::new(lookahead);
    let functions = input.lines().filter_map(|line| machine.step(line)).collect();
    machine.finish();

    Module {
        name: name.to_string(),
        primary_object: None,
        functions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_module() {
        let input = r#"local M = {}

--- Doubles a number.
-- @param x number
-- @return number
function M.double(x)
    return x * 2
end

--- Halves a number.
--- @param x number
--- @return number
M.half = function(x)
    return x / 2
end

return M
"#;
        let module = parse("M", input, 3);
        assert_eq!(module.name, "M");
        assert_eq!(module.functions.len(), 2);
        assert_eq!(module.functions[0].name, "M.double");
        assert_eq!(module.functions[1].name, "M.half");
    }

    #[test]
    fn parse_empty_module() {
        let module = parse("Empty", "local M = {}\nreturn M\n", 3);
        assert!(module.functions.is_empty());
    }
}
