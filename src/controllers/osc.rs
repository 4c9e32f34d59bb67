// src/controllers/osc.rs
// OSC Controller
//
// Remote mosaic selection. Messages are drained once per frame and turned
// into MosaicCommands for the app to apply.

use nannou_osc as osc;
use std::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum MosaicCommand {
    Select { id: String },
    SelectIndex { index: usize },
}

pub fn parse_message(message: &osc::Message) -> Option<MosaicCommand> {
    match message.addr.as_str() {
        "/mosaic/select" => {
            if let [osc::Type::String(id)] = &message.args[..] {
                return Some(MosaicCommand::Select { id: id.clone() });
            }
            log::warn!("/mosaic/select expects a single string argument");
            None
        }
        "/mosaic/index" => {
            if let [osc::Type::Int(index)] = &message.args[..] {
                if *index >= 0 {
                    return Some(MosaicCommand::SelectIndex {
                        index: *index as usize,
                    });
                }
            }
            log::warn!("/mosaic/index expects a single non-negative int argument");
            None
        }
        _ => {
            log::warn!("Unknown OSC address pattern: {}", message.addr);
            None
        }
    }
}

pub struct OscController {
    command_queue: Vec<MosaicCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;
        log::info!("Listening for OSC on port {}", port);

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                if let Some(command) = parse_message(&message) {
                    self.command_queue.push(command);
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<MosaicCommand> {
        std::mem::take(&mut self.command_queue)
    }
}
