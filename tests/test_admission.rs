// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use edgefirst_blit::{
    feasibility, BlitDescriptor, BufferRef, Clip, ColorFormat, FilterMode, Generation, Plane,
    Reject, TransferMode, Transform, TransformClass,
};
use std::error::Error;

fn plane(w: i32, h: i32, bpp: i32, format: ColorFormat) -> Plane {
    Plane {
        buf: BufferRef::from_slice(&[]),
        x: 0,
        y: 0,
        w,
        h,
        stride: w * bpp,
        full_height: h,
        bpp,
        format,
    }
}

fn copy_desc(w: i32, h: i32) -> BlitDescriptor {
    BlitDescriptor {
        src: Some(plane(w, h, 4, ColorFormat::Argb8888)),
        dst: plane(w, h, 4, ColorFormat::Argb8888),
        msk: None,
        clip: Clip {
            l: 0,
            t: 0,
            r: w,
            b: h,
        },
        mode: TransferMode::SrcOver,
        alpha: 255,
        dither: false,
        filter: FilterMode::Nearest,
        rotation: 0,
        fill_color: 0,
        color_filter: false,
        transform: Transform::IDENTITY,
    }
}

#[test]
fn test_plain_copy_is_feasible() -> Result<(), Box<dyn Error>> {
    let d = copy_desc(64, 64);
    let caps = Generation::Gen4.capabilities();

    assert_eq!(feasibility::check_possible(&d, caps), Ok(()));
    assert_eq!(feasibility::check_translucent_modes(&d, caps), Ok(()));

    Ok(())
}

#[test]
fn test_indexed_source_format_rejected() -> Result<(), Box<dyn Error>> {
    let mut d = copy_desc(64, 64);
    d.src = Some(plane(64, 64, 1, ColorFormat::Index8));

    assert_eq!(
        feasibility::check_possible(&d, Generation::Gen4.capabilities()),
        Err(Reject::SrcFormat(ColorFormat::Index8))
    );

    Ok(())
}

#[test]
fn test_mask_destination_format_rejected() -> Result<(), Box<dyn Error>> {
    let mut d = copy_desc(64, 64);
    d.dst = plane(64, 64, 1, ColorFormat::Alpha8);

    assert_eq!(
        feasibility::check_possible(&d, Generation::Gen4.capabilities()),
        Err(Reject::DstFormat(ColorFormat::Alpha8))
    );

    Ok(())
}

#[test]
fn test_color_filter_rejected() -> Result<(), Box<dyn Error>> {
    let mut d = copy_desc(64, 64);
    d.color_filter = true;

    assert_eq!(
        feasibility::check_possible(&d, Generation::Gen4.capabilities()),
        Err(Reject::ColorFilter)
    );

    Ok(())
}

#[test]
fn test_affine_transform_rejected() -> Result<(), Box<dyn Error>> {
    let mut d = copy_desc(64, 64);
    d.transform = Transform {
        class: TransformClass::Affine,
        sx: 1.0,
        sy: 1.0,
    };

    assert_eq!(
        feasibility::check_possible(&d, Generation::Gen4.capabilities()),
        Err(Reject::AffineTransform)
    );

    Ok(())
}

#[test]
fn test_negative_scale_rejected() -> Result<(), Box<dyn Error>> {
    let mut d = copy_desc(64, 64);
    d.transform = Transform {
        class: TransformClass::Scale,
        sx: -1.0,
        sy: 1.0,
    };

    assert_eq!(
        feasibility::check_possible(&d, Generation::Gen4.capabilities()),
        Err(Reject::NegativeScale)
    );

    Ok(())
}

#[test]
fn test_coordinate_bound_applies_to_both_planes() -> Result<(), Box<dyn Error>> {
    let caps = Generation::Gen4.capabilities();

    let mut d = copy_desc(64, 64);
    if let Some(src) = d.src.as_mut() {
        src.x = 7960;
        src.w = 64;
    }
    assert_eq!(
        feasibility::check_possible(&d, caps),
        Err(Reject::CoordinateRange)
    );

    let mut d = copy_desc(64, 64);
    d.dst.y = 7990;
    assert_eq!(
        feasibility::check_possible(&d, caps),
        Err(Reject::CoordinateRange)
    );

    // Exactly on the bound is still representable.
    let mut d = copy_desc(64, 64);
    d.dst.x = 8000 - 64;
    assert_eq!(feasibility::check_possible(&d, caps), Ok(()));

    Ok(())
}

/// Extents large enough to wrap i32 addition must still land on the
/// range rejection instead of sneaking under the bound.
#[test]
fn test_coordinate_bound_survives_extreme_extents() -> Result<(), Box<dyn Error>> {
    let caps = Generation::Gen4.capabilities();

    let mut d = copy_desc(64, 64);
    if let Some(src) = d.src.as_mut() {
        src.x = i32::MAX;
        src.w = i32::MAX;
    }
    assert_eq!(
        feasibility::check_possible(&d, caps),
        Err(Reject::CoordinateRange)
    );

    let mut d = copy_desc(64, 64);
    d.dst.y = i32::MAX;
    d.dst.h = i32::MAX;
    assert_eq!(
        feasibility::check_possible(&d, caps),
        Err(Reject::CoordinateRange)
    );

    Ok(())
}

#[test]
fn test_zero_stride_plane_rejected() -> Result<(), Box<dyn Error>> {
    let mut d = copy_desc(64, 64);
    d.dst.stride = 0;

    assert_eq!(
        feasibility::check_possible(&d, Generation::Gen4.capabilities()),
        Err(Reject::PlaneLayout)
    );

    Ok(())
}

#[test]
fn test_negative_clip_component_rejected() -> Result<(), Box<dyn Error>> {
    let mut d = copy_desc(64, 64);
    d.clip.l = -1;

    assert_eq!(
        feasibility::check_possible(&d, Generation::Gen4.capabilities()),
        Err(Reject::InvalidClip)
    );

    Ok(())
}

#[test]
fn test_inverted_clip_rejected() -> Result<(), Box<dyn Error>> {
    let mut d = copy_desc(64, 64);
    d.clip = Clip {
        l: 40,
        t: 0,
        r: 10,
        b: 64,
    };

    assert_eq!(
        feasibility::check_possible(&d, Generation::Gen4.capabilities()),
        Err(Reject::InvalidClip)
    );

    Ok(())
}

#[test]
fn test_unsupported_blend_mode_rejected() -> Result<(), Box<dyn Error>> {
    let caps = Generation::Gen4.capabilities();

    for mode in [
        TransferMode::Overlay,
        TransferMode::ColorDodge,
        TransferMode::ColorBurn,
        TransferMode::HardLight,
        TransferMode::SoftLight,
        TransferMode::Difference,
        TransferMode::Exclusion,
    ] {
        let mut d = copy_desc(64, 64);
        d.mode = mode;
        assert_eq!(
            feasibility::check_possible(&d, caps),
            Err(Reject::BlendMode(mode)),
            "{mode:?}"
        );
    }

    Ok(())
}

#[test]
fn test_translucent_restriction_on_nonlinear_modes() -> Result<(), Box<dyn Error>> {
    let caps = Generation::Gen4.capabilities();

    for mode in [
        TransferMode::Multiply,
        TransferMode::Screen,
        TransferMode::Lighten,
        TransferMode::Darken,
        TransferMode::DstOver,
        TransferMode::SrcOut,
        TransferMode::DstAtop,
        TransferMode::Xor,
    ] {
        let mut d = copy_desc(64, 64);
        d.mode = mode;

        d.alpha = 128;
        assert_eq!(
            feasibility::check_translucent_modes(&d, caps),
            Err(Reject::TranslucentBlend(mode)),
            "{mode:?} at alpha 128"
        );

        d.alpha = 255;
        assert_eq!(
            feasibility::check_translucent_modes(&d, caps),
            Ok(()),
            "{mode:?} at alpha 255"
        );
    }

    // SrcOver has no restriction at any alpha.
    let mut d = copy_desc(64, 64);
    d.alpha = 128;
    assert_eq!(feasibility::check_translucent_modes(&d, caps), Ok(()));

    Ok(())
}

#[test]
fn test_dst_mode_detection_is_exclusive() -> Result<(), Box<dyn Error>> {
    for mode in [
        TransferMode::Clear,
        TransferMode::Src,
        TransferMode::Dst,
        TransferMode::SrcOver,
        TransferMode::DstOver,
        TransferMode::SrcIn,
        TransferMode::DstIn,
        TransferMode::SrcOut,
        TransferMode::DstOut,
        TransferMode::SrcAtop,
        TransferMode::DstAtop,
        TransferMode::Xor,
        TransferMode::Plus,
        TransferMode::Multiply,
        TransferMode::Screen,
        TransferMode::Overlay,
        TransferMode::Darken,
        TransferMode::Lighten,
        TransferMode::ColorDodge,
        TransferMode::ColorBurn,
        TransferMode::HardLight,
        TransferMode::SoftLight,
        TransferMode::Difference,
        TransferMode::Exclusion,
    ] {
        let mut d = copy_desc(64, 64);
        d.mode = mode;
        assert_eq!(feasibility::is_dst_mode(&d), mode == TransferMode::Dst);
    }

    Ok(())
}

#[test]
fn test_v4l2_reduced_format_and_blend_sets() -> Result<(), Box<dyn Error>> {
    let caps = Generation::V4L2.capabilities();

    // 4444 surfaces are out on this part, on either side.
    let mut d = copy_desc(64, 64);
    d.src = Some(plane(64, 64, 2, ColorFormat::Argb4444));
    assert_eq!(
        feasibility::check_possible(&d, caps),
        Err(Reject::SrcFormat(ColorFormat::Argb4444))
    );

    let mut d = copy_desc(64, 64);
    d.dst = plane(64, 64, 2, ColorFormat::Argb4444);
    assert_eq!(
        feasibility::check_possible(&d, caps),
        Err(Reject::DstFormat(ColorFormat::Argb4444))
    );

    // Only the basic Porter-Duff quartet survives.
    let mut d = copy_desc(64, 64);
    d.mode = TransferMode::Multiply;
    assert_eq!(
        feasibility::check_possible(&d, caps),
        Err(Reject::BlendMode(TransferMode::Multiply))
    );

    let mut d = copy_desc(64, 64);
    d.src = Some(plane(64, 64, 2, ColorFormat::Rgb565));
    d.dst = plane(64, 64, 2, ColorFormat::Rgb565);
    assert_eq!(feasibility::check_possible(&d, caps), Ok(()));

    Ok(())
}

#[test]
fn test_gen2_shares_full_blend_set() -> Result<(), Box<dyn Error>> {
    let caps = Generation::Gen2.capabilities();

    let mut d = copy_desc(64, 64);
    d.mode = TransferMode::Xor;
    assert_eq!(feasibility::check_possible(&d, caps), Ok(()));

    let mut d = copy_desc(64, 64);
    d.mode = TransferMode::Overlay;
    assert_eq!(
        feasibility::check_possible(&d, caps),
        Err(Reject::BlendMode(TransferMode::Overlay))
    );

    Ok(())
}
