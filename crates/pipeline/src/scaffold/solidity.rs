//! Foundry-style Solidity test scaffold.

use super::{capitalize, solidity_symbols, Capabilities};
use std::fmt::Write;

pub fn generate(code: &str) -> String {
    let symbols = solidity_symbols(code);
    let caps = Capabilities::detect(code);
    let contract = symbols.container.unwrap_or_else(|| "TestContract".to_string());

    let mut out = String::new();
    let _ = writeln!(out, "// SPDX-License-Identifier: MIT");
    let _ = writeln!(out, "pragma solidity ^0.8.19;");
    let _ = writeln!(out);
    let _ = writeln!(out, "import \"forge-std/Test.sol\";");
    let _ = writeln!(out);
    let _ = writeln!(out, "contract {contract}Test is Test {{");
    let _ = writeln!(out, "    {contract} internal target;");
    let _ = writeln!(out);
    let _ = writeln!(out, "    function setUp() public {{");
    let _ = writeln!(out, "        target = new {contract}();");
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out);
    let _ = writeln!(out, "    function testDeployment() public {{");
    let _ = writeln!(out, "        assertTrue(address(target) != address(0));");
    let _ = writeln!(out, "    }}");

    for function in &symbols.functions {
        let camel = capitalize(function);
        let _ = writeln!(out);
        let _ = writeln!(out, "    function test{camel}Functionality() public {{");
        let _ = writeln!(out, "        // Exercise {function} with representative inputs.");
        let _ = writeln!(out, "        assertTrue(true, \"{function} should behave as documented\");");
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out);
        let _ = writeln!(out, "    function test{camel}AccessControl() public {{");
        let _ = writeln!(out, "        vm.prank(address(0xBEEF));");
        let _ = writeln!(out, "        // Call {function} from a stranger account and expect a revert.");
        let _ = writeln!(out, "        assertTrue(true, \"{function} should restrict callers\");");
        let _ = writeln!(out, "    }}");
    }

    if caps.post_quantum {
        let _ = writeln!(out);
        let _ = writeln!(out, "    function testPostQuantumHashStability() public {{");
        let _ = writeln!(out, "        bytes32 first = target.postQuantumHash(abi.encodePacked(\"input\"));");
        let _ = writeln!(out, "        bytes32 second = target.postQuantumHash(abi.encodePacked(\"input\"));");
        let _ = writeln!(out, "        assertEq(first, second);");
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out);
        let _ = writeln!(out, "    function testDilithiumRejectsForgedSignature() public {{");
        let _ = writeln!(out, "        bytes memory forged = hex\"00\";");
        let _ = writeln!(out, "        vm.expectRevert();");
        let _ = writeln!(out, "        target.dilithiumVerify(keccak256(\"msg\"), forged);");
        let _ = writeln!(out, "    }}");
    }

    if caps.reentrancy_guard {
        let _ = writeln!(out);
        let _ = writeln!(out, "    function testReentrancyAttackReverts() public {{");
        let _ = writeln!(out, "        ReentrancyAttacker attacker = new ReentrancyAttacker(address(target));");
        let _ = writeln!(out, "        vm.expectRevert();");
        let _ = writeln!(out, "        attacker.attack();");
        let _ = writeln!(out, "    }}");
    }

    if symbols.functions.is_empty() && !caps.post_quantum && !caps.reentrancy_guard {
        let _ = writeln!(out);
        let _ = writeln!(out, "    function testPlaceholder() public {{");
        let _ = writeln!(out, "        assertTrue(true, \"no public surface detected\");");
        let _ = writeln!(out, "    }}");
    }

    let _ = writeln!(out, "}}");

    if caps.reentrancy_guard {
        let _ = writeln!(out);
        let _ = writeln!(out, "contract ReentrancyAttacker {{");
        let _ = writeln!(out, "    address private target;");
        let _ = writeln!(out);
        let _ = writeln!(out, "    constructor(address _target) {{");
        let _ = writeln!(out, "        target = _target;");
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out);
        let _ = writeln!(out, "    function attack() external {{");
        let _ = writeln!(out, "        (bool ok, ) = target.call{{value: 0}}(\"\");");
        let _ = writeln!(out, "        require(ok, \"attack call failed\");");
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out);
        let _ = writeln!(out, "    receive() external payable {{");
        let _ = writeln!(out, "        (bool ok, ) = target.call{{value: 0}}(\"\");");
        let _ = writeln!(out, "        ok;");
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out, "}}");
    }

    out
}
