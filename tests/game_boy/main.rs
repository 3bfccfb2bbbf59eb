mod cartridge;
mod common;
mod cpu;
mod input;
mod timers;
mod video;
