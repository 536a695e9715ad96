// crates/gifcount-media/src/probe.rs
//
// In-process FFmpeg probing. The duration comes from the demuxer (container
// header, or the best video stream as a fallback); one frame is then decoded
// so a file that merely has a .gif name but no decodable image is rejected.

use std::path::Path;

use ffmpeg_the_third as ffmpeg;
use ffmpeg::format::{context::Input, input};
use ffmpeg::media::Type;

use gifcount_core::media_types::DecodeFailure;

/// Anything that can turn a path into a playback duration in seconds.
///
/// Called concurrently from the rayon pool, hence `Send + Sync`.
pub trait DurationProbe: Send + Sync {
    fn probe(&self, path: &Path) -> Result<f64, DecodeFailure>;
}

/// Production probe backed by libavformat / libavcodec.
#[derive(Debug, Default, Clone, Copy)]
pub struct FfmpegProbe;

impl DurationProbe for FfmpegProbe {
    fn probe(&self, path: &Path) -> Result<f64, DecodeFailure> {
        probe_duration(path)
    }
}

pub fn probe_duration(path: &Path) -> Result<f64, DecodeFailure> {
    let mut ictx = input(&path).map_err(|e| DecodeFailure::Open { msg: e.to_string() })?;
    let seconds = playback_seconds(&ictx).ok_or(DecodeFailure::UnknownDuration)?;
    decode_first_frame(&mut ictx)?;
    tracing::debug!("duration {seconds:.2}s ← {}", path.display());
    Ok(seconds)
}

fn playback_seconds(ictx: &Input) -> Option<f64> {
    let dur = ictx.duration() as f64 / ffmpeg::ffi::AV_TIME_BASE as f64;
    if dur > 0.0 {
        return Some(dur);
    }

    // Fall back to stream duration (AV_NOPTS_VALUE is negative and falls through)
    let stream = ictx.streams().best(Type::Video)?;
    let tb = stream.time_base();
    let d  = stream.duration() as f64 * tb.numerator() as f64
        / tb.denominator() as f64;
    (d.is_finite() && d > 0.0).then_some(d)
}

/// Pushes packets through the video decoder until one frame comes out.
fn decode_first_frame(ictx: &mut Input) -> Result<(), DecodeFailure> {
    let corrupt = |msg: String| DecodeFailure::Corrupt { msg };

    let (video_idx, mut decoder) = {
        let stream = ictx.streams().best(Type::Video)
            .ok_or_else(|| corrupt("no video stream".into()))?;
        let decoder = ffmpeg::codec::context::Context::from_parameters(stream.parameters())
            .and_then(|c| c.decoder().video())
            .map_err(|e| corrupt(format!("decoder: {e}")))?;
        (stream.index(), decoder)
    };

    let mut frame = ffmpeg::util::frame::video::Video::empty();
    for (stream, packet) in ictx.packets().flatten() {
        if stream.index() != video_idx { continue; }
        if decoder.send_packet(&packet).is_err() { continue; }
        if decoder.receive_frame(&mut frame).is_ok() {
            return Ok(());
        }
    }

    // Single-frame files may only emit once the decoder is drained.
    if decoder.send_eof().is_ok() && decoder.receive_frame(&mut frame).is_ok() {
        return Ok(());
    }
    Err(corrupt("no frame could be decoded".into()))
}
