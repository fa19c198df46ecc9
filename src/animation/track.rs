use crate::animation::command::{SampleCommand, TimedCommand, TimedEntry};
use crate::errors::{PatrolError, Result};

const MAX_SCAN_OFFSET: usize = 3;

/// A looping, ordered sequence of timed commands with a cursor.
///
/// A track starts playing at command 0 as soon as it is built and wraps back
/// to command 0 after the last one, forever. It does not own a clock: the
/// host advances it once per frame with [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct Track<C> {
    commands: Vec<C>,
    /// Start offset of each command within one loop.
    starts: Vec<f32>,
    loop_duration: f32,

    time: f32,
    cursor: usize,
    loops: u64,
    playing: bool,
}

impl<C> Track<C> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Always `false`: construction rejects empty command lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn commands(&self) -> &[C] {
        &self.commands
    }
}

impl<C: TimedCommand> Track<C> {
    /// Builds a track and starts it at command 0.
    pub fn new(commands: Vec<C>) -> Result<Self> {
        if commands.is_empty() {
            return Err(PatrolError::EmptyTrack);
        }

        let mut starts = Vec::with_capacity(commands.len());
        let mut loop_duration = 0.0_f32;
        for command in &commands {
            starts.push(loop_duration);
            loop_duration += command.duration().max(0.0);
        }

        if loop_duration <= 0.0 {
            log::warn!(
                "Track of {} commands has no positive duration and will not advance",
                commands.len()
            );
        }

        let mut track = Self {
            commands,
            starts,
            loop_duration,
            time: 0.0,
            cursor: 0,
            loops: 0,
            playing: true,
        };
        track.cursor = track.locate(0.0);
        Ok(track)
    }

    /// Builds a track from `(start, end, duration)` entries, creating each
    /// command with `make(duration, start, end)`.
    pub fn from_entries<T, F>(entries: &[TimedEntry<T>], mut make: F) -> Result<Self>
    where
        T: Copy,
        F: FnMut(f32, T, T) -> C,
    {
        let commands = entries
            .iter()
            .map(|e| make(e.duration, e.start, e.end))
            .collect();
        Self::new(commands)
    }

    /// Moves the track forward by `dt` seconds.
    ///
    /// Returns `true` when the active command changed or a loop completed.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.playing || self.loop_duration <= 0.0 || dt <= 0.0 {
            return false;
        }

        let previous = (self.cursor, self.loops);

        self.time += dt;
        if self.time >= self.loop_duration {
            self.loops += (self.time / self.loop_duration) as u64;
            self.time = self.time.rem_euclid(self.loop_duration);
            if self.time >= self.loop_duration {
                self.time = 0.0;
            }
        }

        self.cursor = self.locate(self.time);
        previous != (self.cursor, self.loops)
    }

    /// Finds the command active at `time` (seconds into the loop).
    ///
    /// Playback normally moves forward a command or two per frame, so a short
    /// scan from the cursor covers almost every call. Wrap-around and large
    /// steps fall back to a binary search over the start offsets.
    fn locate(&self, time: f32) -> usize {
        let len = self.starts.len();
        let i = self.cursor;

        if time >= self.starts[i] {
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    return len - 1;
                }
                if time < self.starts[idx + 1] {
                    return idx;
                }
            }
        }

        self.starts
            .partition_point(|&t| t <= time)
            .saturating_sub(1)
    }

    /// Rewinds to command 0 without changing the play state.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.loops = 0;
        self.cursor = 0;
        self.cursor = self.locate(0.0);
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Index of the active command.
    #[must_use]
    pub fn index(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn current(&self) -> &C {
        &self.commands[self.cursor]
    }

    /// Seconds since the active command started.
    #[must_use]
    pub fn local_time(&self) -> f32 {
        self.time - self.starts[self.cursor]
    }

    /// Seconds since the current loop started.
    #[must_use]
    pub fn loop_time(&self) -> f32 {
        self.time
    }

    /// Number of completed loops.
    #[must_use]
    pub fn loops(&self) -> u64 {
        self.loops
    }

    #[must_use]
    pub fn loop_duration(&self) -> f32 {
        self.loop_duration
    }
}

impl<C: SampleCommand> Track<C> {
    /// Value of the active command at the current time.
    #[must_use]
    pub fn sample(&self) -> C::Value {
        self.current().sample(self.local_time())
    }
}
