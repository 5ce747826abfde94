use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use log::warn;

/// 440Hz sine beeper, played while the machine's sound timer is nonzero.
pub struct Beeper {
    stream: cpal::Stream,
    active: bool,
}

impl Beeper {
    /// `None` when no usable output device exists; the machine then runs
    /// silent.
    pub fn new() -> Option<Self> {
        let host = cpal::default_host();
        let device = host.default_output_device()?;
        let config = match device.default_output_config() {
            Ok(config) => config,
            Err(err) => {
                warn!("no audio output config: {err}");
                return None;
            }
        };

        let built = match config.sample_format() {
            cpal::SampleFormat::F32 => Self::build::<f32>(&device, &config.into()),
            cpal::SampleFormat::I16 => Self::build::<i16>(&device, &config.into()),
            cpal::SampleFormat::U16 => Self::build::<u16>(&device, &config.into()),
            format => {
                warn!("unsupported audio sample format {format}");
                return None;
            }
        };
        let stream = match built {
            Ok(stream) => stream,
            Err(err) => {
                warn!("could not open audio stream: {err}");
                return None;
            }
        };
        if let Err(err) = stream.pause() {
            warn!("could not pause audio stream: {err}");
        }
        Some(Self {
            stream,
            active: false,
        })
    }

    fn build<T>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
    ) -> Result<cpal::Stream, cpal::BuildStreamError>
    where
        T: SizedSample + FromSample<f32>,
    {
        let sample_rate = config.sample_rate.0 as f32;
        let channels = config.channels as usize;

        let mut clock = 0f32;
        let mut next_sample = move || {
            clock = (clock + 1.0) % sample_rate;
            (clock * 440.0 * 2.0 * std::f32::consts::PI / sample_rate).sin() * 0.25
        };

        device.build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let value = T::from_sample(next_sample());
                    for sample in frame.iter_mut() {
                        *sample = value;
                    }
                }
            },
            |err| warn!("audio stream error: {err}"),
            None,
        )
    }

    pub fn set_active(&mut self, on: bool) {
        if on == self.active {
            return;
        }
        let outcome = if on {
            self.stream.play().map_err(|err| err.to_string())
        } else {
            self.stream.pause().map_err(|err| err.to_string())
        };
        match outcome {
            Ok(()) => self.active = on,
            Err(err) => warn!("audio state change failed: {err}"),
        }
    }
}
