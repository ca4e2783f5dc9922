/// Terminal presentation — all I/O for the frame lives here.
///
/// The 128x64 framebuffer is shown two pixel rows per terminal row using
/// half-block glyphs, so the whole screen fits in 128x32 cells.  No game
/// logic; this module only moves pixels to the terminal.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use ghost_hop::framebuffer::{FrameBuffer, FB_H, FB_W};

const C_SCREEN: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Flush one complete frame to the terminal.
pub fn present<W: Write>(out: &mut W, fb: &FrameBuffer) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(style::SetForegroundColor(C_SCREEN))?;

    for row in 0..FB_H / 2 {
        let mut line = String::with_capacity(FB_W as usize * 3);
        for x in 0..FB_W {
            let upper = fb.get(x, row * 2);
            let lower = fb.get(x, row * 2 + 1);
            line.push(match (upper, lower) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.queue(cursor::MoveTo(0, row as u16))?;
        out.queue(Print(line))?;
    }

    out.queue(cursor::MoveTo(0, (FB_H / 2) as u16))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   ↑ / W / SPACE : Jump   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
