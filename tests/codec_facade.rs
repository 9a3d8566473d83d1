use mediacodec_ext::codec::{is_software_mime_supported, CodecBackend, HardwareCodecFactory, NoHardware};
use mediacodec_ext::error::Error;
use mediacodec_ext::{AudioFormat, BufferInfo, CodecFacade, DecoderConfig, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Records every call it receives
struct MockHardware {
    calls: Rc<RefCell<Vec<String>>>,
    input: Vec<u8>,
    output: Vec<u8>,
}

impl MockHardware {
    fn log(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }
}

impl CodecBackend for MockHardware {
    fn configure(&mut self, _format: Option<&AudioFormat>, _flags: u32) -> Result<()> {
        self.log("configure");
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        self.log("start");
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.log("stop");
        Ok(())
    }

    fn release(&mut self) {
        self.log("release");
    }

    fn dequeue_input_buffer(&mut self, _timeout_us: i64) -> Result<Option<usize>> {
        self.log("dequeue_input_buffer");
        Ok(Some(7))
    }

    fn input_buffer(&mut self, _index: usize) -> Option<&mut [u8]> {
        self.log("input_buffer");
        Some(self.input.as_mut_slice())
    }

    fn queue_input_buffer(&mut self, _index: usize, _offset: usize, size: usize, _pts: i64, _flags: u32) -> Result<()> {
        self.log("queue_input_buffer");
        self.output = self.input[..size].to_vec();
        Ok(())
    }

    fn dequeue_output_buffer(&mut self, _timeout_us: i64) -> Result<Option<(usize, BufferInfo)>> {
        self.log("dequeue_output_buffer");
        Ok(Some((
            3,
            BufferInfo {
                size: self.output.len(),
                presentation_time_us: 42,
                ..BufferInfo::default()
            },
        )))
    }

    fn output_buffer(&mut self, _index: usize) -> Option<&[u8]> {
        self.log("output_buffer");
        Some(self.output.as_slice())
    }

    fn release_output_buffer(&mut self, _index: usize, _render: bool) -> Result<()> {
        self.log("release_output_buffer");
        Ok(())
    }

    fn output_format(&self) -> Result<AudioFormat> {
        Ok(AudioFormat::raw_pcm(48000, 2, 16))
    }
}

struct MockFactory {
    calls: Rc<RefCell<Vec<String>>>,
}

impl HardwareCodecFactory for MockFactory {
    fn create_decoder_by_type(&self, _mime: &str) -> Result<Box<dyn CodecBackend>> {
        Ok(Box::new(MockHardware {
            calls: Rc::clone(&self.calls),
            input: vec![0; 64],
            output: Vec::new(),
        }))
    }
}

#[test]
fn test_alaw_falls_back_to_software() {
    let codec = CodecFacade::create_decoder_by_type("audio/g711-alaw").unwrap();
    assert!(codec.is_software());
    assert_eq!(codec.mime(), "audio/g711-alaw");

    let format = codec.output_format().unwrap();
    assert_eq!(format, AudioFormat::raw_pcm(8000, 1, 16));
}

#[test]
fn test_mime_match_is_case_insensitive() {
    let codec = CodecFacade::create_decoder_by_type("AUDIO/G711-MLAW").unwrap();
    assert!(codec.is_software());
    assert!(is_software_mime_supported("Audio/G711-Alaw"));
    assert!(!is_software_mime_supported("audio/opus"));
}

#[test]
fn test_unsupported_mime_fails() {
    let result = CodecFacade::create_decoder_by_type("audio/unsupported-codec");
    match result {
        Err(Error::DecoderUnavailable { mime }) => assert_eq!(mime, "audio/unsupported-codec"),
        Err(e) => panic!("Unexpected error: {}", e),
        Ok(_) => panic!("Expected DecoderUnavailable"),
    }
}

#[test]
fn test_invalid_software_config_is_reported() {
    let config = DecoderConfig {
        input_buffer_size: 0,
        ..DecoderConfig::default()
    };
    let result = CodecFacade::create_decoder_by_type_with(&NoHardware, "audio/g711-alaw", &config);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_hardware_preferred_over_software() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let factory = MockFactory { calls: Rc::clone(&calls) };

    let codec = CodecFacade::create_decoder_by_type_with(&factory, "audio/g711-alaw", &DecoderConfig::default()).unwrap();
    assert!(!codec.is_software());
    assert_eq!(codec.output_format().unwrap().sample_rate, 48000);
}

#[test]
fn test_facade_forwards_to_hardware() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let factory = MockFactory { calls: Rc::clone(&calls) };
    let mut codec = CodecFacade::create_decoder_by_type_with(&factory, "audio/mp4a-latm", &DecoderConfig::default()).unwrap();

    codec.configure(None, 0).unwrap();
    codec.start().unwrap();
    let index = codec.dequeue_input_buffer(1000).unwrap().unwrap();
    assert_eq!(index, 7);
    codec.input_buffer(index).unwrap()[..3].copy_from_slice(&[1, 2, 3]);
    codec.queue_input_buffer(index, 0, 3, 0, 0).unwrap();

    let (out_index, info) = codec.dequeue_output_buffer(1000).unwrap().unwrap();
    assert_eq!(out_index, 3);
    assert_eq!(info.presentation_time_us, 42);
    assert_eq!(codec.output_buffer(out_index).unwrap(), &[1u8, 2, 3]);
    codec.release_output_buffer(out_index, false).unwrap();
    codec.stop().unwrap();

    // Second release and drop must not reach the backend again
    codec.release();
    codec.release();
    drop(codec);

    let calls = calls.borrow();
    assert_eq!(
        *calls,
        vec![
            "configure",
            "start",
            "dequeue_input_buffer",
            "input_buffer",
            "queue_input_buffer",
            "dequeue_output_buffer",
            "output_buffer",
            "release_output_buffer",
            "stop",
            "release",
        ]
    );
}

#[test]
fn test_drop_releases_backend() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let factory = MockFactory { calls: Rc::clone(&calls) };
    let codec = CodecFacade::create_decoder_by_type_with(&factory, "audio/opus", &DecoderConfig::default()).unwrap();
    drop(codec);

    assert_eq!(*calls.borrow(), vec!["release"]);
}

#[test]
fn test_software_facade_decodes() {
    let mut codec = CodecFacade::create_decoder_by_type("audio/g711-mlaw").unwrap();
    codec.configure(None, 0).unwrap();
    codec.start().unwrap();

    let index = codec.dequeue_input_buffer(10_000).unwrap().unwrap();
    codec.input_buffer(index).unwrap()[..2].copy_from_slice(&[0xFF, 0x80]);
    codec.queue_input_buffer(index, 0, 2, 0, 0).unwrap();

    let (out_index, info) = codec.dequeue_output_buffer(10_000).unwrap().unwrap();
    assert_eq!(info.size, 4);
    let output = codec.output_buffer(out_index).unwrap();
    assert_eq!(output, &[0x00u8, 0x00, 0x7C, 0x7D]);

    codec.release_output_buffer(out_index, true).unwrap();
    codec.stop().unwrap();
    codec.release();
}
