//! RIFF chunk assembly for the `.vox` format.
//!
//! Layout: `"VOX "` magic, version 150, then a `MAIN` chunk whose
//! children are `SIZE` (extent), `XYZI` (packed non-empty voxels) and
//! `RGBA` (palette entries for indices 1..=255, plus one unused slot).

use crate::VoxelObject;

const MAGIC: &[u8; 4] = b"VOX ";
const VERSION: u32 = 150;

/// Serialize a volume to `.vox` bytes.
pub(crate) fn to_bytes(object: &VoxelObject) -> Vec<u8> {
    let size = size_content(object);
    let xyzi = xyzi_content(object);
    let rgba = rgba_content(object);

    let children_size = (size.len() + xyzi.len() + rgba.len() + 3 * 12) as u32;

    let mut out = Vec::with_capacity(8 + 12 + children_size as usize);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());

    // MAIN carries no content of its own, only children.
    out.extend_from_slice(b"MAIN");
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&children_size.to_le_bytes());

    chunk(&mut out, b"SIZE", &size);
    chunk(&mut out, b"XYZI", &xyzi);
    chunk(&mut out, b"RGBA", &rgba);

    out
}

fn chunk(out: &mut Vec<u8>, id: &[u8; 4], content: &[u8]) {
    out.extend_from_slice(id);
    out.extend_from_slice(&(content.len() as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(content);
}

fn size_content(object: &VoxelObject) -> Vec<u8> {
    let size = object.size();
    let mut content = Vec::with_capacity(12);
    content.extend_from_slice(&(size.x as u32).to_le_bytes());
    content.extend_from_slice(&(size.y as u32).to_le_bytes());
    content.extend_from_slice(&(size.z as u32).to_le_bytes());
    content
}

fn xyzi_content(object: &VoxelObject) -> Vec<u8> {
    let count = object.voxel_count();
    let mut content = Vec::with_capacity(4 + count * 4);
    content.extend_from_slice(&(count as u32).to_le_bytes());
    for (p, index) in object.voxels() {
        content.push(p.x as u8);
        content.push(p.y as u8);
        content.push(p.z as u8);
        content.push(index);
    }
    content
}

fn rgba_content(object: &VoxelObject) -> Vec<u8> {
    let mut content = Vec::with_capacity(1024);
    // File entry i holds the color for palette index i + 1.
    for &color in &object.palette()[1..] {
        content.extend_from_slice(&color.to_le_bytes());
    }
    content.extend_from_slice(&[0; 4]);
    content
}

#[cfg(test)]
mod tests {
    use crate::{default_palette, Point, VoxelObject};

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn header_and_chunk_layout() {
        let mut object = VoxelObject::new(Point::new(5, 4, 3), *default_palette()).unwrap();
        object.set(Point::new(1, 2, 0), 6);
        object.set(Point::new(4, 3, 2), 9);

        let bytes = object.to_bytes();
        assert_eq!(&bytes[0..4], b"VOX ");
        assert_eq!(u32_at(&bytes, 4), 150);
        assert_eq!(&bytes[8..12], b"MAIN");
        assert_eq!(u32_at(&bytes, 12), 0);
        // MAIN's children fill the rest of the file exactly.
        assert_eq!(u32_at(&bytes, 16) as usize, bytes.len() - 20);

        assert_eq!(&bytes[20..24], b"SIZE");
        assert_eq!(u32_at(&bytes, 24), 12);
        assert_eq!(u32_at(&bytes, 32), 5);
        assert_eq!(u32_at(&bytes, 36), 4);
        assert_eq!(u32_at(&bytes, 40), 3);

        assert_eq!(&bytes[44..48], b"XYZI");
        assert_eq!(u32_at(&bytes, 48), 4 + 2 * 4);
        assert_eq!(u32_at(&bytes, 56), 2); // voxel count

        let xyzi_end = 56 + 4 + 2 * 4;
        assert_eq!(&bytes[xyzi_end..xyzi_end + 4], b"RGBA");
        assert_eq!(u32_at(&bytes, xyzi_end + 4), 1024);
        assert_eq!(bytes.len(), xyzi_end + 12 + 1024);
    }

    #[test]
    fn xyzi_records_written_voxels() {
        let mut object = VoxelObject::new(Point::new(8, 8, 8), *default_palette()).unwrap();
        object.set(Point::new(3, 5, 7), 42);

        let bytes = object.to_bytes();
        let record = &bytes[60..64];
        assert_eq!(record, &[3, 5, 7, 42]);
    }

    #[test]
    fn empty_volume_writes_empty_xyzi() {
        let object = VoxelObject::new(Point::new(2, 2, 2), *default_palette()).unwrap();
        let bytes = object.to_bytes();
        assert_eq!(u32_at(&bytes, 48), 4);
        assert_eq!(u32_at(&bytes, 56), 0);
    }
}
