//! Pipeline and state rendering.
//!
//! Text renderers for the per-cycle pipeline view shown in trace mode and
//! for the program listing and final machine state. All of them write to any
//! `io::Write`, so the binary can target stdout and tests can target a
//! buffer.

use std::io::{self, Write};

use crate::core::arch::Gpr;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::CycleObserver;
use crate::core::units::lsu::{DataMemory, WORD_BYTES};
use crate::core::Cpu;
use crate::isa::abi;
use crate::isa::encode::encode;
use crate::isa::Instruction;

/// Prints the full pipeline state after every tick.
///
/// The first write error is kept and later cycles are skipped; it can be
/// retrieved with [`PipelinePrinter::take_error`].
pub struct PipelinePrinter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> PipelinePrinter<W> {
    /// Creates a printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Returns the first write error, if one occurred.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Consumes the printer and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CycleObserver for PipelinePrinter<W> {
    fn on_cycle(&mut self, cpu: &Cpu) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = write_cycle(&mut self.out, cpu) {
            self.error = Some(e);
        }
    }
}

/// Writes one cycle's view: the four latches followed by the non-zero
/// registers.
pub fn write_cycle<W: Write>(out: &mut W, cpu: &Cpu) -> io::Result<()> {
    writeln!(out, "\n========== CYCLE {} ==========", cpu.cycles())?;
    writeln!(out, "PC: {}", cpu.pc)?;

    write_if_id(out, cpu.if_id())?;
    write_id_ex(out, cpu.id_ex())?;
    write_ex_mem(out, cpu.ex_mem())?;
    write_mem_wb(out, cpu.mem_wb())?;

    writeln!(out, "\nRegisters (non-zero):")?;
    write_registers(out, &cpu.regs)
}

fn write_if_id<W: Write>(out: &mut W, latch: &IfId) -> io::Result<()> {
    writeln!(out, "\nIF/ID:")?;
    match latch.entry() {
        None => writeln!(out, "  [empty]"),
        Some(e) => {
            writeln!(out, "  Instruction: {}", e.inst)?;
            writeln!(out, "  PC: {}", e.pc)
        }
    }
}

fn write_id_ex<W: Write>(out: &mut W, latch: &IdEx) -> io::Result<()> {
    writeln!(out, "\nID/EX:")?;
    match latch.entry() {
        None => writeln!(out, "  [empty]"),
        Some(e) => {
            writeln!(out, "  Instruction: {}", e.inst)?;
            writeln!(out, "  PC: {}", e.pc)?;
            write_control_signals(out, &e.ctrl)?;
            writeln!(
                out,
                "  rs_val: {}  rt_val: {}  imm: {}  dest: {}",
                e.rs_val,
                e.rt_val,
                e.sign_ext_imm,
                abi::reg_name(e.dest_reg)
            )
        }
    }
}

fn write_ex_mem<W: Write>(out: &mut W, latch: &ExMem) -> io::Result<()> {
    writeln!(out, "\nEX/MEM:")?;
    match latch.entry() {
        None => writeln!(out, "  [empty]"),
        Some(e) => {
            writeln!(out, "  Instruction: {}", e.inst)?;
            writeln!(out, "  PC: {}", e.pc)?;
            write_control_signals(out, &e.ctrl)?;
            writeln!(
                out,
                "  alu_result: {}  rt_val: {}  dest: {}",
                e.alu_result,
                e.rt_val,
                abi::reg_name(e.dest_reg)
            )?;
            if e.branch_taken {
                writeln!(out, "  Branch taken -> {}", e.branch_target)?;
            }
            Ok(())
        }
    }
}

fn write_mem_wb<W: Write>(out: &mut W, latch: &MemWb) -> io::Result<()> {
    writeln!(out, "\nMEM/WB:")?;
    match latch.entry() {
        None => writeln!(out, "  [empty]"),
        Some(e) => {
            writeln!(out, "  Instruction: {}", e.inst)?;
            writeln!(out, "  PC: {}", e.pc)?;
            write_control_signals(out, &e.ctrl)?;
            writeln!(
                out,
                "  alu_result: {}  mem_data: {}  dest: {}",
                e.alu_result,
                e.mem_read_data,
                abi::reg_name(e.dest_reg)
            )
        }
    }
}

/// Writes the control signals as `0`/`1` flags on one line.
pub fn write_control_signals<W: Write>(out: &mut W, ctrl: &ControlSignals) -> io::Result<()> {
    writeln!(
        out,
        "  Control: RegDst={} ALUSrc={} MemToReg={} RegWrite={} MemRead={} MemWrite={} Branch={} Jump={}",
        u8::from(ctrl.reg_dst),
        u8::from(ctrl.alu_src),
        u8::from(ctrl.mem_to_reg),
        u8::from(ctrl.reg_write),
        u8::from(ctrl.mem_read),
        u8::from(ctrl.mem_write),
        u8::from(ctrl.branch),
        u8::from(ctrl.jump)
    )
}

/// Writes every non-zero register as `$name: decimal (0xhex)`.
pub fn write_registers<W: Write>(out: &mut W, regs: &Gpr) -> io::Result<()> {
    let mut any = false;
    for (idx, val) in regs.iter().filter(|&(_, v)| v != 0) {
        writeln!(out, "  {:<6}: {:>11} (0x{:08x})", abi::reg_name(idx), val, val)?;
        any = true;
    }
    if !any {
        writeln!(out, "  (all zero)")?;
    }
    Ok(())
}

/// Writes every non-zero memory word with its byte address.
pub fn write_memory<W: Write>(out: &mut W, memory: &DataMemory) -> io::Result<()> {
    let mut any = false;
    for (idx, &val) in memory.words().iter().enumerate().filter(|&(_, &v)| v != 0) {
        writeln!(out, "  [{:>5}]: {:>11} (0x{:08x})", idx * WORD_BYTES as usize, val, val)?;
        any = true;
    }
    if !any {
        writeln!(out, "  (all zero)")?;
    }
    Ok(())
}

/// Writes the program listing: byte address, binary encoding, source text.
pub fn write_listing<W: Write>(out: &mut W, program: &[Instruction]) -> io::Result<()> {
    writeln!(out, "Address  Machine Code                      Instruction")?;
    writeln!(out, "-------  --------------------------------  -----------")?;
    for (i, inst) in program.iter().enumerate() {
        writeln!(out, "{:>7}  {:032b}  {}", i * WORD_BYTES as usize, encode(inst, i), inst)?;
    }
    Ok(())
}

/// Writes the final register file and data memory.
pub fn write_final_state<W: Write>(out: &mut W, cpu: &Cpu) -> io::Result<()> {
    writeln!(out, "\n========== FINAL STATE ==========")?;
    writeln!(out, "Cycles: {}", cpu.cycles())?;
    writeln!(out, "PC: {}", cpu.pc)?;
    writeln!(out, "\nRegisters (non-zero):")?;
    write_registers(out, &cpu.regs)?;
    writeln!(out, "\nMemory (non-zero):")?;
    write_memory(out, &cpu.memory)
}
