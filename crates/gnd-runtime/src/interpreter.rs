//! The interpreter core: the dispatch loop (§4.7), `HandleCodeResult`
//! (§4.7.1), subroutine-call scoping (§4.7.2), and error decoration
//! (§4.7.3).
//!
//! The loop is written iteratively, not recursively: a `code` result
//! swaps the list being executed in place rather than pushing a new
//! stack frame, so arbitrarily many `code @` reifications cost no extra
//! Rust stack depth. Subroutine and `exec` calls do recurse one Rust
//! frame per call, mirroring the language's own call stack.

use crate::error::RunError;
use crate::logger::DepthGuard;
use crate::primitives::build_registry;
use crate::registry::Registry;
use crate::resolve::resolve_args;
use crate::scope::Scope;
use crate::subroutine::Loader;
use crate::value::Value;
use gnd_syntax::Instruction;
use std::path::PathBuf;
use std::rc::Rc;

/// The result of running a block to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockOutcome {
    /// Normal completion (or an early `return`): the block's result value.
    Value(Value),
    /// An `exit` sentinel reached the end of its propagation: the process
    /// exit code it carried.
    Exit(i32),
}

/// Owns the primitive registry and the subroutine loader for one script
/// invocation. Stateless across invocations, per the external interface
/// contract (§6, Persisted state: none).
pub struct Interpreter {
    registry: Registry,
    loader: Loader,
}

impl Interpreter {
    /// Subroutines referenced by the script are resolved relative to `script_dir`.
    pub fn new(script_dir: impl Into<PathBuf>) -> Self {
        Interpreter {
            registry: build_registry(),
            loader: Loader::new(script_dir),
        }
    }

    /// Runs `instructions` as the top-level script body, with `_` seeded to `input`.
    pub fn run(&self, source: &str, instructions: &[Instruction], input: Value) -> Result<BlockOutcome, RunError> {
        let mut scope = Scope::new();
        scope.set("_", input);
        let list: Rc<[Instruction]> = Rc::from(instructions.to_vec().into_boxed_slice());
        run_block(self, list, &mut scope, source)
    }
}

/// Runs a block of instructions to completion against `scope`, honoring
/// the control-flow sentinels a primitive or subroutine call may yield.
///
/// `source` names the currently executing script or subroutine, used only
/// for log lines and error decoration.
pub fn run_block(
    interp: &Interpreter,
    mut list: Rc<[Instruction]>,
    scope: &mut Scope,
    source: &str,
) -> Result<BlockOutcome, RunError> {
    let mut last_value = Value::Nil;
    let mut idx = 0;

    loop {
        if idx >= list.len() {
            return Ok(BlockOutcome::Value(last_value));
        }
        let instr = list[idx].clone();

        log::debug!(
            "{} -> {} {:?}",
            instr.opcode,
            instr.destination,
            instr.args
        );

        let resolved = resolve_args(&instr.args, scope)
            .map_err(|e| e.wrap(&instr.opcode, "ResolveArgs"))?;

        let result = dispatch(interp, &instr.opcode, resolved, source)?;

        match result {
            Value::Return(v) => return Ok(BlockOutcome::Value(*v)),
            Value::Exit(code) => return Ok(BlockOutcome::Exit(code)),
            Value::Code(targets) => {
                let remainder = &list[idx + 1..];
                list = handle_code_result(interp, remainder, targets, source)?;
                idx = 0;
                continue;
            }
            Value::Exec(routine, args) => {
                let instrs = resolve_routine(interp, &routine, source)?;
                match run_block(interp, instrs, &mut Scope::for_call(Value::List(args)), source)? {
                    BlockOutcome::Exit(code) => return Ok(BlockOutcome::Exit(code)),
                    BlockOutcome::Value(v) => {
                        scope.set(&instr.destination, v.clone());
                        last_value = v;
                    }
                }
            }
            value => {
                scope.set(&instr.destination, value.clone());
                last_value = value;
            }
        }

        idx += 1;
    }
}

/// Dispatches a single opcode (§4.7 step 4): an exact/alias match in the
/// registry runs first; otherwise the name is resolved as a subroutine.
fn dispatch(interp: &Interpreter, opcode: &str, args: Vec<Value>, source: &str) -> Result<Value, RunError> {
    if let Some(primitive) = interp.registry.lookup(opcode) {
        return primitive.execute(args).map_err(|e| e.wrap(opcode, "Dispatch"));
    }

    let instrs = interp
        .loader
        .load(opcode)
        .map_err(|e| e.wrap(opcode, "LoadSubroutine"))?;

    let _depth = DepthGuard::enter();
    let outcome = run_block(interp, instrs, &mut Scope::for_call(Value::List(args)), opcode)
        .map_err(|e| e.wrap(opcode, "Call"))?;
    match outcome {
        BlockOutcome::Value(v) => Ok(v),
        BlockOutcome::Exit(code) => Ok(Value::Exit(code)),
    }
}

/// `HandleCodeResult` (§4.7.1): assembles the replacement instruction
/// list from a `code` sentinel's targets, in order. `"@"` means "the
/// instructions that would otherwise run next in this block" (i.e. the
/// block's remainder past the `code` instruction itself — so `code @`
/// with no other targets is a no-op, per testable property P8); any
/// other string is a subroutine name; anything else must already be a
/// resolved routine.
fn handle_code_result(
    interp: &Interpreter,
    remainder: &[Instruction],
    targets: Vec<Value>,
    source: &str,
) -> Result<Rc<[Instruction]>, RunError> {
    let mut assembled = Vec::new();
    for target in targets {
        match target {
            Value::Str(name) if name == "@" => assembled.extend(remainder.iter().cloned()),
            Value::Str(name) => {
                let instrs = interp
                    .loader
                    .load(&name)
                    .map_err(|e| e.wrap(&name, "LoadSubroutine"))?;
                assembled.extend(instrs.iter().cloned());
            }
            Value::Routine(instrs) => assembled.extend(instrs.iter().cloned()),
            other => {
                return Err(RunError::type_error(format!(
                    "invalid target type: {}",
                    other.type_name()
                ))
                .wrap(source, "HandleCodeResult"))
            }
        }
    }
    Ok(Rc::from(assembled.into_boxed_slice()))
}

/// Resolves an `exec` sentinel's carried routine value to its instruction
/// list: either a subroutine name (loaded the same way `HandleCodeResult`
/// loads a named target) or an already-resolved routine.
fn resolve_routine(interp: &Interpreter, value: &Value, source: &str) -> Result<Rc<[Instruction]>, RunError> {
    match value {
        Value::Str(name) => interp
            .loader
            .load(name)
            .map_err(|e| e.wrap(name, "LoadSubroutine")),
        Value::Routine(instrs) => Ok(Rc::clone(instrs)),
        other => Err(RunError::type_error(format!(
            "exec: expected routine or subroutine name, got {}",
            other.type_name()
        ))
        .wrap(source, "Exec")),
    }
}
