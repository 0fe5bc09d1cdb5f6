//! Bouncing balls: a fixed canvas fills with circles that drift at
//! constant speed, reflect off the edges, and repaint themselves with a
//! shared random color whenever two of them overlap. A translucent black
//! wash each frame fades the previous frame into motion trails instead of
//! erasing it.

pub mod modules;
