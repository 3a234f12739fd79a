// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned capture sessions.
//!
//! A [`CaptureSession`] wraps one capture adapter and walks it through a
//! fixed lifecycle: created, running, finished. Each session owns its
//! adapter and its result, so any number of sessions (and tests) can run
//! side by side.

use crate::composer::SceneComposer;
use crate::record::CapturedRoom;
use crate::scene::Scene;

/// Adapter between a room-scanning SDK and the plan records.
///
/// Implementations translate the SDK's own capture types into
/// [`CapturedRoom`] records when the capture ends.
pub trait CaptureSource {
    /// Failure reported by the underlying SDK.
    type Error: core::error::Error + 'static;

    /// Start capturing.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Stop capturing and hand over the finished result.
    fn stop(&mut self) -> Result<CapturedRoom, Self::Error>;
}

/// Where a session is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Created, not started yet.
    Idle,
    /// Capturing.
    Running,
    /// Stopped with a finished room.
    Finished,
}

/// Errors from driving a [`CaptureSession`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError<E: core::error::Error + 'static> {
    /// `run` was called on a running session.
    #[error("capture session is already running")]
    AlreadyRunning,
    /// `stop` was called on a session that is not running.
    #[error("capture session is not running")]
    NotRunning,
    /// `run` was called on a session that already finished.
    #[error("capture session has already finished")]
    AlreadyFinished,
    /// A finished room was asked for before the session stopped.
    #[error("capture session has no finished room")]
    NoRoom,
    /// The capture adapter failed.
    #[error("capture source failed")]
    Source(#[source] E),
}

/// One capture, from start to finished room.
#[derive(Debug)]
pub struct CaptureSession<S> {
    source: S,
    state: SessionState,
    room: Option<CapturedRoom>,
}

impl<S: CaptureSource> CaptureSession<S> {
    /// Create an idle session around `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: SessionState::Idle,
            room: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Start capturing.
    ///
    /// If the adapter fails to start, the session stays idle.
    pub fn run(&mut self) -> Result<(), SessionError<S::Error>> {
        match self.state {
            SessionState::Running => return Err(SessionError::AlreadyRunning),
            SessionState::Finished => return Err(SessionError::AlreadyFinished),
            SessionState::Idle => {}
        }
        self.source.start().map_err(SessionError::Source)?;
        self.state = SessionState::Running;
        tracing::debug!("capture session running");
        Ok(())
    }

    /// Stop capturing and keep the finished room.
    ///
    /// If the adapter fails to stop, the session stays running so the stop
    /// can be retried.
    pub fn stop(&mut self) -> Result<&CapturedRoom, SessionError<S::Error>> {
        if self.state != SessionState::Running {
            return Err(SessionError::NotRunning);
        }
        let room = self.source.stop().map_err(SessionError::Source)?;
        tracing::debug!(
            surfaces = room.surface_count(),
            objects = room.objects.len(),
            "capture session finished"
        );
        self.state = SessionState::Finished;
        Ok(&*self.room.insert(room))
    }

    /// The finished room, once the session has stopped.
    pub fn room(&self) -> Option<&CapturedRoom> {
        self.room.as_ref()
    }

    /// Compose the finished room.
    pub fn compose(&self, composer: &SceneComposer) -> Result<Scene, SessionError<S::Error>> {
        self.room
            .as_ref()
            .map(|room| composer.compose_room(room))
            .ok_or(SessionError::NoRoom)
    }

    /// Consume the session, returning the finished room if there is one.
    pub fn into_room(self) -> Option<CapturedRoom> {
        self.room
    }

    /// The adapter this session drives.
    pub fn source(&self) -> &S {
        &self.source
    }
}

/// A capture source that replays a room recorded earlier.
#[derive(Clone, Debug, Default)]
pub struct ReplaySource {
    room: Option<CapturedRoom>,
    started: bool,
}

/// Errors from a [`ReplaySource`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// The recorded room was already handed over.
    #[error("recorded room was already replayed")]
    Exhausted,
    /// `stop` was called before `start`.
    #[error("replay was stopped before it started")]
    NotStarted,
}

impl ReplaySource {
    /// Create a source that hands back `room` once.
    pub fn new(room: CapturedRoom) -> Self {
        Self {
            room: Some(room),
            started: false,
        }
    }
}

impl CaptureSource for ReplaySource {
    type Error = ReplayError;

    fn start(&mut self) -> Result<(), Self::Error> {
        if self.room.is_none() {
            return Err(ReplayError::Exhausted);
        }
        self.started = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<CapturedRoom, Self::Error> {
        if !self.started {
            return Err(ReplayError::NotStarted);
        }
        self.started = false;
        self.room.take().ok_or(ReplayError::Exhausted)
    }
}
