use flatvm::{program, program::*, Program, ProgramResult};
use lazy_static::lazy_static;
use maplit::btreemap;
use std::collections::BTreeMap;

pub struct Demo {
	pub about: &'static str,
	/// Capacity used when none is given on the command line
	pub capacity: usize,
	pub build: fn() -> ProgramResult<Program>,
}

lazy_static! {
	pub static ref DEMOS: BTreeMap<&'static str, Demo> = btreemap! {
		"move" => Demo { about: "store a literal", capacity: 1, build: move_literal },
		"ones" => Demo { about: "set a cell when the sign flag is up", capacity: 2, build: set_on_sign },
		"data" => Demo { about: "increment a variable declared later", capacity: 4, build: hoisted_data },
		"operations" => Demo { about: "add, sub and mov through names", capacity: 5, build: operations },
		"flags" => Demo { about: "one, ones and onez after arithmetic", capacity: 20, build: flags },
		"redeclare" => Demo { about: "declare one name ten times", capacity: 11, build: redeclare },
		"exceeded" => Demo { about: "declare more variables than fit", capacity: 9, build: exceeded },
		"out-of-range" => Demo { about: "write far past the end of memory", capacity: 11, build: out_of_range },
	};
}

fn move_literal() -> ProgramResult<Program> {
	Ok(program![mov(mem(num(0)), num(42))])
}

fn set_on_sign() -> ProgramResult<Program> {
	Ok(program![dec(mem(num(1))), ones(mem(num(0)))])
}

fn hoisted_data() -> ProgramResult<Program> {
	Ok(program![
		inc(mem(lea("a")?)),
		data("a", 0)?,
		data("b", 2)?,
		data("c", 3)?,
	])
}

fn operations() -> ProgramResult<Program> {
	Ok(program![
		data("a", 4)?,
		data("b", 3)?,
		data("c", 2)?,
		data("d", 1)?,
		add(mem(lea("a")?), mem(lea("c")?)),
		sub(mem(lea("b")?), mem(lea("d")?)),
		mov(mem(lea("c")?), num(0)),
		mov(mem(lea("d")?), num(0)),
	])
}

fn flags() -> ProgramResult<Program> {
	let mut program = vec![onez(mem(num(18))), ones(mem(num(17)))];
	// xd1 xd2 xd3 xd4 xd11 .. xd4444
	for width in 1..=4 {
		for (digit, value) in [("1", 4), ("2", 3), ("3", 2), ("4", 1)] {
			program.push(data(&format!("xd{}", digit.repeat(width)), value)?);
		}
	}
	program.extend([
		sub(mem(lea("xd1")?), mem(lea("xd11")?)),
		one(mem(num(19))),
		onez(mem(lea("xd1")?)),
		add(mem(lea("xd2")?), mem(num(19))),
		dec(mem(lea("xd4")?)),
		onez(mem(lea("xd2")?)),
		ones(mem(lea("xd3")?)),
		dec(mem(num(19))),
		dec(mem(num(19))),
		ones(mem(lea("xd111")?)),
	]);
	Ok(Program::new(program))
}

fn redeclare() -> ProgramResult<Program> {
	(0..10).map(|_| data("a", 42)).collect()
}

fn exceeded() -> ProgramResult<Program> {
	(1..=10).map(|i| data(&format!("a{}", i), i)).collect()
}

fn out_of_range() -> ProgramResult<Program> {
	Ok(program![mov(mem(num(100)), num(2))])
}
